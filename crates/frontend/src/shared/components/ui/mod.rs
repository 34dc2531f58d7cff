pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod multi_select;
pub mod select;
pub mod tag_input;
pub mod textarea;

pub use badge::{status_variant, Badge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use multi_select::{Chip, MultiSelect};
pub use select::{SelectOption, StyledSelect};
pub use tag_input::TagInput;
pub use textarea::Textarea;
