//! Linear undo history over immutable snapshots.
//!
//! Every frame pairs a state with the action that produced it, so the
//! log of actions leading to the present can be read back at any time,
//! including after undo and redo walks.

#[derive(Debug, Clone)]
struct Frame<T, A> {
    state: T,
    action: Option<A>,
}

/// Past and future stacks around a present value. The bottom of the past
/// stack is the state history started from; it carries no action.
#[derive(Debug, Clone)]
pub struct UndoableState<T, A> {
    past: Vec<Frame<T, A>>,
    future: Vec<Frame<T, A>>,
    present: T,
    present_action: Option<A>,
}

impl<T, A> UndoableState<T, A> {
    pub fn new(present: T) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            present,
            present_action: None,
        }
    }

    /// A history whose first state was itself produced by an action. The
    /// action appears in the log but cannot be undone.
    pub fn seeded(present: T, action: A) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            present,
            present_action: Some(action),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// The oldest state still reachable through undo.
    pub fn first_state(&self) -> &T {
        self.past.first().map_or(&self.present, |frame| &frame.state)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Records a new present. The previous present moves into the past
    /// and any redoable future is discarded.
    pub fn executed(&mut self, state: T, action: A) {
        let state = std::mem::replace(&mut self.present, state);
        let action = std::mem::replace(&mut self.present_action, Some(action));

        self.past.push(Frame { state, action });
        self.future.clear();
    }

    /// Swaps the present without a new frame. The change is invisible to
    /// undo and absent from the action log.
    pub fn replace_present(&mut self, state: T) {
        self.present = state;
    }

    /// Steps back one frame. A no-op at the first state.
    pub fn undo(&mut self) {
        let frame = match self.past.pop() {
            Some(frame) => frame,
            None => return,
        };

        let state = std::mem::replace(&mut self.present, frame.state);
        let action = std::mem::replace(&mut self.present_action, frame.action);
        self.future.push(Frame { state, action });
    }

    /// Steps forward one undone frame. A no-op with nothing to redo.
    pub fn redo(&mut self) {
        let frame = match self.future.pop() {
            Some(frame) => frame,
            None => return,
        };

        let state = std::mem::replace(&mut self.present, frame.state);
        let action = std::mem::replace(&mut self.present_action, frame.action);
        self.past.push(Frame { state, action });
    }
}

impl<T, A: Clone> UndoableState<T, A> {
    /// The actions that led from the first state to the present, oldest
    /// first. Replaying them over the first state rebuilds the present.
    pub fn actions(&self) -> Vec<A> {
        self.past
            .iter()
            .map(|frame| frame.action.as_ref())
            .chain(std::iter::once(self.present_action.as_ref()))
            .flatten()
            .cloned()
            .collect()
    }
}
