use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModalState {
    pub is_open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Where a click inside the overlay landed. Only a click on the backdrop
    /// itself dismisses; clicks in the content are contained.
    pub fn click(&mut self, target: OverlayClick) {
        if target == OverlayClick::Backdrop {
            self.close();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayClick {
    Backdrop,
    Content,
}

pub enum ModalAction {
    Open,
    Close,
    Click(OverlayClick),
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            ModalAction::Open => next.open(),
            ModalAction::Close => next.close(),
            ModalAction::Click(target) => next.click(target),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_are_idempotent() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open);

        modal.open();
        modal.open();
        assert!(modal.is_open);

        modal.close();
        modal.close();
        assert!(!modal.is_open);
    }

    #[test]
    fn backdrop_click_dismisses() {
        let mut modal = ModalState { is_open: true };
        modal.click(OverlayClick::Backdrop);
        assert!(!modal.is_open);
    }

    #[test]
    fn content_click_is_contained() {
        let mut modal = ModalState { is_open: true };
        modal.click(OverlayClick::Content);
        assert!(modal.is_open);
    }

    #[test]
    fn reopening_starts_fresh() {
        let modal = Rc::new(ModalState::default());
        let modal = modal.reduce(ModalAction::Open);
        let modal = modal.reduce(ModalAction::Click(OverlayClick::Backdrop));
        assert!(!modal.is_open);
        let modal = modal.reduce(ModalAction::Open);
        assert!(modal.is_open);
    }
}
