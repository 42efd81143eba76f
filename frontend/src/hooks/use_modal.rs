use yew::prelude::*;

/// Which modal is on screen. A single tagged value makes "at most one
/// modal open" structural instead of a convention over separate flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    None,
    AddTransaction,
    /// Editing the transaction with this id.
    EditTransaction(String),
    Logout,
}

pub struct UseModalResult {
    pub state: ModalState,
    pub open: Callback<ModalState>,
    pub close: Callback<()>,
}

#[hook]
pub fn use_modal() -> UseModalResult {
    let state = use_state(ModalState::default);

    let open = {
        let state = state.clone();
        use_callback((), move |next: ModalState, _| {
            state.set(next);
        })
    };

    let close = {
        let state = state.clone();
        use_callback((), move |_, _| {
            state.set(ModalState::None);
        })
    };

    UseModalResult {
        state: (*state).clone(),
        open,
        close,
    }
}
