mod button;
mod checkbox;
mod input;
mod select;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
