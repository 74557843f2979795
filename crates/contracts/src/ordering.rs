//! Клиентская модель формирования заказа торговой точки.
//!
//! Состояние — набор строк (товар, остаток, выбранное количество),
//! инициализированный из фида доступности. Все производные величины
//! (стоимость строк, доставка, итог) пересчитываются при каждом
//! обращении и нигде не кэшируются.

use serde::{Deserialize, Serialize};

use crate::domain::availability::AvailabilityEntry;
use crate::domain::order::OrderLine;
use crate::domain::product::Product;

/// Доля веса в стоимости доставки.
const WEIGHT_RATE: f64 = 0.2;
/// Фиксированный сбор за обработку строки заказа.
///
/// Начисляется на каждую строку с ненулевым количеством, а не один раз
/// на заказ. Так считает исходная система; если бизнес решит иначе,
/// менять нужно только `delivery_cost`.
const HANDLING_FEE: f64 = 500.0;

/// Строка выбора: товар с остатком и выбранным количеством.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionLine {
    pub product: Product,
    pub factory_id: i64,
    pub available: u32,
    pub selected: u32,
}

impl SelectionLine {
    /// Стоимость строки по текущему выбору.
    pub fn line_total(&self) -> f64 {
        self.product.price * self.selected as f64
    }
}

/// Состояние конструктора заказа.
///
/// Живёт от открытия диалога заказа до его закрытия или успешной
/// отправки; между перезагрузками страницы ничего не сохраняется.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSelection {
    lines: Vec<SelectionLine>,
}

impl OrderSelection {
    /// Создаёт выбор из фида доступности, по строке на товар,
    /// с нулевым выбранным количеством.
    pub fn from_availability(feed: &[AvailabilityEntry]) -> Self {
        let lines = feed
            .iter()
            .map(|entry| SelectionLine {
                product: entry.product.clone(),
                factory_id: entry.factory_id,
                available: entry.quantity,
                selected: 0,
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[SelectionLine] {
        &self.lines
    }

    /// Строки, попадающие в заказ (выбрано больше нуля).
    pub fn selected_lines(&self) -> impl Iterator<Item = &SelectionLine> {
        self.lines.iter().filter(|line| line.selected > 0)
    }

    /// Устанавливает количество для товара, зажимая в [0, остаток].
    /// Неизвестный товар игнорируется, чужие строки не трогаются.
    pub fn set_quantity(&mut self, product_id: i64, value: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.selected = value.min(line.available);
        }
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map(|l| l.selected)
            .unwrap_or(0)
    }

    /// Суммарная стоимость выбранных товаров.
    pub fn total_products_price(&self) -> f64 {
        self.lines.iter().map(SelectionLine::line_total).sum()
    }

    /// Стоимость доставки: весовая надбавка плюс фиксированный сбор
    /// за каждую строку с ненулевым количеством.
    pub fn delivery_cost(&self) -> f64 {
        self.selected_lines()
            .map(|line| WEIGHT_RATE * line.product.weight * line.selected as f64 + HANDLING_FEE)
            .sum()
    }

    /// Итог заказа.
    pub fn total_price(&self) -> f64 {
        self.total_products_price() + self.delivery_cost()
    }

    /// Тело запроса создания заказа: только строки с выбранным
    /// количеством.
    pub fn build_submission(&self) -> Vec<OrderLine> {
        self.selected_lines()
            .map(|line| OrderLine {
                product_id: line.product.id,
                quantity: line.selected,
            })
            .collect()
    }

    /// Пустой заказ отправлять нельзя.
    pub fn can_submit(&self) -> bool {
        self.lines.iter().any(|line| line.selected > 0)
    }

    /// Сбрасывает выбор после успешной отправки.
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.selected = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, weight: f64) -> Product {
        Product {
            id,
            name: format!("Товар {id}"),
            price,
            weight,
            category_id: None,
            description: None,
        }
    }

    fn entry(id: i64, price: f64, weight: f64, quantity: u32) -> AvailabilityEntry {
        AvailabilityEntry {
            product: product(id, price, weight),
            factory_id: 1,
            quantity,
        }
    }

    #[test]
    fn starts_with_zero_selection_per_feed_row() {
        let sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10)]);
        assert_eq!(sel.lines().len(), 1);
        assert_eq!(sel.quantity_of(1), 0);
        assert!(!sel.can_submit());
    }

    #[test]
    fn pricing_for_single_line() {
        // Пример из постановки: цена 100, вес 2, выбрано 3.
        let mut sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10)]);
        sel.set_quantity(1, 3);

        assert_eq!(sel.lines()[0].line_total(), 300.0);
        assert_eq!(sel.total_products_price(), 300.0);
        assert!((sel.delivery_cost() - 501.2).abs() < 1e-9);
        assert!((sel.total_price() - 801.2).abs() < 1e-9);
    }

    #[test]
    fn handling_fee_charged_per_selected_line() {
        let mut sel = OrderSelection::from_availability(&[
            entry(1, 100.0, 2.0, 10),
            entry(2, 50.0, 1.0, 5),
            entry(3, 10.0, 0.5, 5),
        ]);
        sel.set_quantity(1, 3);
        sel.set_quantity(2, 2);
        // третья строка не выбрана и не должна дать ни сбора, ни надбавки

        let expected = (0.2 * 2.0 * 3.0 + 500.0) + (0.2 * 1.0 * 2.0 + 500.0);
        assert!((sel.delivery_cost() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_selection_gives_empty_submission() {
        let sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10)]);
        assert!(sel.build_submission().is_empty());
        assert!(!sel.can_submit());
        assert_eq!(sel.delivery_cost(), 0.0);
        assert_eq!(sel.total_price(), 0.0);
    }

    #[test]
    fn submission_skips_zero_lines() {
        let mut sel =
            OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10), entry(2, 50.0, 1.0, 5)]);
        sel.set_quantity(2, 4);

        let body = sel.build_submission();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].product_id, 2);
        assert_eq!(body[0].quantity, 4);
    }

    #[test]
    fn quantity_clamped_to_availability() {
        let mut sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 3)]);
        sel.set_quantity(1, 99);
        assert_eq!(sel.quantity_of(1), 3);
    }

    #[test]
    fn set_quantity_touches_only_addressed_line() {
        let mut sel =
            OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10), entry(2, 50.0, 1.0, 5)]);
        sel.set_quantity(1, 2);
        sel.set_quantity(2, 3);
        sel.set_quantity(1, 7);

        assert_eq!(sel.quantity_of(1), 7);
        assert_eq!(sel.quantity_of(2), 3);
    }

    #[test]
    fn unknown_product_is_ignored() {
        let mut sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10)]);
        sel.set_quantity(777, 5);
        assert_eq!(sel.quantity_of(1), 0);
        assert_eq!(sel.quantity_of(777), 0);
    }

    #[test]
    fn pricing_recomputed_after_mutation() {
        let mut sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10)]);
        sel.set_quantity(1, 3);
        let first = sel.total_price();
        sel.set_quantity(1, 1);
        let second = sel.total_price();
        assert!(second < first);
        assert!((second - (100.0 + 0.2 * 2.0 + 500.0)).abs() < 1e-9);
    }

    #[test]
    fn clear_resets_selection() {
        let mut sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 10)]);
        sel.set_quantity(1, 3);
        sel.clear();
        assert!(!sel.can_submit());
        assert_eq!(sel.quantity_of(1), 0);
    }

    #[test]
    fn zero_availability_pins_selection_at_zero() {
        let mut sel = OrderSelection::from_availability(&[entry(1, 100.0, 2.0, 0)]);
        sel.set_quantity(1, 1);
        assert_eq!(sel.quantity_of(1), 0);
    }
}
