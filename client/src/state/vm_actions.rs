//! Single in-flight VM control command per table.
//!
//! DESIGN
//! ======
//! Only one action may be pending at a time. While it is, every action
//! button in the owning table is disabled and the acting row swaps its
//! status for the progress label.

#[cfg(test)]
#[path = "vm_actions_test.rs"]
mod vm_actions_test;

use models::VmAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAction {
    pub vm_id: String,
    pub action: VmAction,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VmActionState {
    pub pending: Option<PendingAction>,
}

impl VmActionState {
    /// Claim the slot; returns `false` when another action is already pending.
    pub fn try_begin(&mut self, vm_id: &str, action: VmAction) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingAction { vm_id: vm_id.to_owned(), action });
        true
    }

    pub fn finish(&mut self) {
        self.pending = None;
    }

    /// Buttons are disabled while anything is pending.
    pub fn controls_disabled(&self) -> bool {
        self.pending.is_some()
    }

    /// Progress label for `vm_id` if that row owns the pending action.
    pub fn progress_for(&self, vm_id: &str) -> Option<&'static str> {
        self.pending
            .as_ref()
            .filter(|pending| pending.vm_id == vm_id)
            .map(|pending| pending.action.progress_label())
    }
}
