#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit,
    View,
}

/// `Closed -> Open -> Submitting -> Closed`. Nothing survives a close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open(ModalMode),
    Submitting(ModalMode),
}

#[derive(Debug, Default)]
pub struct Modal {
    phase: ModalPhase,
}

impl Modal {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self.phase {
            ModalPhase::Closed => None,
            ModalPhase::Open(mode) | ModalPhase::Submitting(mode) => Some(mode),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, ModalPhase::Submitting(_))
    }

    /// Refused while a submission is in flight.
    pub fn open(&mut self, mode: ModalMode) -> bool {
        if self.is_submitting() {
            return false;
        }

        self.phase = ModalPhase::Open(mode);
        true
    }

    /// Moves an open add/edit modal to `Submitting`. View modals never submit.
    pub fn begin_submit(&mut self) -> Option<ModalMode> {
        match self.phase {
            ModalPhase::Open(mode @ (ModalMode::Add | ModalMode::Edit)) => {
                self.phase = ModalPhase::Submitting(mode);
                Some(mode)
            }
            _ => None,
        }
    }

    pub fn close(&mut self) {
        self.phase = ModalPhase::Closed;
    }
}
