/**
* filename : switch
* date: 2026. 10. 19.
* description: Confirmation modal guarding "switch wallet".
**/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchConfirm {
    #[default]
    Closed,
    Open,
}

impl SwitchConfirm {
    pub fn is_open(&self) -> bool {
        matches!(self, SwitchConfirm::Open)
    }

    pub fn request_switch(&mut self) {
        *self = SwitchConfirm::Open;
    }

    pub fn cancel(&mut self) {
        *self = SwitchConfirm::Closed;
    }

    /// Closes the modal. Returns true when it was open, i.e. the caller has
    /// to run the logout.
    pub fn confirm(&mut self) -> bool {
        match self {
            SwitchConfirm::Open => {
                *self = SwitchConfirm::Closed;
                true
            }
            SwitchConfirm::Closed => false,
        }
    }
}
