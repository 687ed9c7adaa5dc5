pub mod footer;
pub mod header;
pub mod language_switcher;
pub mod modal_host;
pub mod navigation;
pub mod notice_banner;
pub mod reset_password_modal;

pub use footer::Footer;
pub use header::Header;
pub use modal_host::ModalHost;
pub use notice_banner::NoticeBanner;
