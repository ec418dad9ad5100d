pub mod dataset_panel;
pub mod legend;
pub mod toast;
pub mod tooltip;
