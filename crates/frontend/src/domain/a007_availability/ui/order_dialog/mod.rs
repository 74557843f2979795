use contracts::api::ApiError;
use contracts::ordering::OrderSelection;
use leptos::prelude::*;

use crate::domain::a007_availability::model;
use crate::shared::api_client::ApiClient;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::Button;
use crate::shared::format::format_money;
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

/// Диалог оформления заказа: выбранные строки, разбивка стоимости и
/// отправка. Кнопка отправки блокируется на время запроса; при ошибке
/// выбор сохраняется, и заказ можно отправить повторно.
#[component]
pub fn OrderDialog(
    selection: RwSignal<OrderSelection>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let (is_submitting, set_is_submitting) = signal(false);

    let submit = move |_| {
        let current = selection.get_untracked();
        if !current.can_submit() || is_submitting.get_untracked() {
            return;
        }

        let lines = current.build_submission();
        let token = auth_state.get_untracked().token;

        set_is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                model::submit_order(&client, &lines).await
            }
            .await;

            set_is_submitting.set(false);
            match result {
                Ok(()) => {
                    toast.success("Заказ оформлен", "Заказ передан в обработку");
                    selection.update(|s| s.clear());
                    on_success.run(());
                }
                Err(ApiError::PermissionDenied) => {
                    toast.error("Заказ не оформлен", &ApiError::PermissionDenied.to_string());
                }
                Err(e) => {
                    log::error!("Order submit failed: {}", e);
                    toast.error("Заказ не оформлен", "Не удалось отправить заказ, попробуйте ещё раз");
                }
            }
        });
    };

    view! {
        <Modal title="Оформление заказа".to_string() on_close=on_close>
            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Товар"</th>
                            <th class="table__header-cell">"Цена"</th>
                            <th class="table__header-cell">"Количество"</th>
                            <th class="table__header-cell">"Сумма"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || selection.get().selected_lines().map(|line| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{line.product.name.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_money(line.product.price)}</td>
                                    <td class="table__cell table__cell--number">{line.selected}</td>
                                    <td class="table__cell table__cell--number">{format_money(line.line_total())}</td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>

            <div class="order-summary">
                <div class="order-summary__row">
                    <span>"Стоимость товаров"</span>
                    <span>{move || format_money(selection.get().total_products_price())}</span>
                </div>
                <div class="order-summary__row">
                    <span>"Доставка"</span>
                    <span>{move || format_money(selection.get().delivery_cost())}</span>
                </div>
                <div class="order-summary__row order-summary__row--total">
                    <span>"Итого"</span>
                    <span>{move || format_money(selection.get().total_price())}</span>
                </div>
            </div>

            <div class="form__actions">
                <Button
                    disabled=Signal::derive(move || {
                        is_submitting.get() || !selection.get().can_submit()
                    })
                    on_click=Callback::new(submit)
                >
                    {move || if is_submitting.get() { "Отправка..." } else { "Заказать" }}
                </Button>
                <Button
                    variant="secondary".to_string()
                    on_click=Callback::new(move |_| on_close.run(()))
                >
                    "Отмена"
                </Button>
            </div>
        </Modal>
    }
}
