mod boot;
mod portal;

pub use boot::BootController;
pub use portal::PortalHttpController;
