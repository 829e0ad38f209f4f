pub mod remote;
pub mod toast;
pub mod ui;
pub mod vm_actions;
