use crate::error::Error;

pub trait SignalValue: Clone + 'static {}

impl<T: SignalValue> SignalValue for Option<T> {}

/// State of a named wire: either carrying a driven value or left without a
/// defining write. Distinct from a wire defaulted to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireState<T> {
    Driven(T),
    Unassigned,
}

#[derive(Debug, Clone)]
pub struct Wire<T> {
    name: &'static str,
    state: WireState<T>,
}

impl<T: SignalValue> Wire<T> {
    pub const fn unassigned(name: &'static str) -> Self {
        Self {
            name,
            state: WireState::Unassigned,
        }
    }

    pub fn driven(name: &'static str, value: T) -> Self {
        Self {
            name,
            state: WireState::Driven(value),
        }
    }

    /// Last write wins.
    pub fn drive(&mut self, value: T) {
        self.state = WireState::Driven(value);
    }

    /// Fails with [`Error::UnassignedSignal`] until the first `drive`; an
    /// undriven wire never reads as zero.
    pub fn sample(&self) -> Result<T, Error> {
        match &self.state {
            WireState::Driven(value) => Ok(value.clone()),
            WireState::Unassigned => Err(Error::UnassignedSignal(self.name)),
        }
    }

    pub fn is_driven(&self) -> bool {
        matches!(self.state, WireState::Driven(_))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &WireState<T> {
        &self.state
    }
}
