pub mod modal_frame;
pub mod statusbar;
pub mod tab_bar;

pub use modal_frame::{modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize};
pub use statusbar::render_statusbar;
pub use tab_bar::render_tab_bar;
