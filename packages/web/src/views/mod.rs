mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod logout;
pub use logout::Logout;

mod shell;
pub use shell::{Frame, Shell};

mod dashboard;
pub use dashboard::Dashboard;

mod storefront;
pub use storefront::Storefront;
