//! Selection and edit-mode state machine for one photo's route set.
//!
//! The machine is the single source of truth for the mode. The external
//! "edit mode" toggle is folded in through [`InteractionStateMachine::reconcile_edit_flag`],
//! which reacts only when the flag actually changes.

use std::fmt;

use tracing::debug;

/// Current interaction mode. The selected route index travels with the mode,
/// so `Viewing` can never carry one and the other modes always do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    #[default]
    Viewing,
    RouteSelected(usize),
    EditRoute(usize),
}

impl SessionMode {
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Viewing => None,
            Self::RouteSelected(i) | Self::EditRoute(i) => Some(*i),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::EditRoute(_))
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewing => write!(f, "viewing"),
            Self::RouteSelected(i) => write!(f, "routeSelected({i})"),
            Self::EditRoute(i) => write!(f, "editRoute({i})"),
        }
    }
}

/// Why a request left the mode untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Route index past the end of the route list.
    OutOfRange { index: usize, total: usize },
    /// Request valid in principle, but not from the current mode.
    InvalidFrom(SessionMode),
    /// The machine is already where the request would take it.
    AlreadyThere,
    /// External edit flag repeated its previous value.
    FlagUnchanged,
}

/// Outcome of a transition request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied { from: SessionMode, to: SessionMode },
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// True when the selected route index differs before and after.
    pub fn changes_selection(&self) -> bool {
        match self {
            Self::Applied { from, to } => from.selected_index() != to.selected_index(),
            Self::Ignored(_) => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct InteractionStateMachine {
    mode: SessionMode,
    /// Last value of the external edit toggle seen by `reconcile_edit_flag`.
    edit_flag: bool,
}

impl InteractionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.mode.selected_index()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn select_route(&mut self, index: usize, total: usize) -> Transition {
        if index >= total {
            return self.ignore("select_route", IgnoreReason::OutOfRange { index, total });
        }
        match self.mode {
            SessionMode::Viewing => self.go("select_route", SessionMode::RouteSelected(index)),
            SessionMode::RouteSelected(current) if current == index => {
                self.ignore("select_route", IgnoreReason::AlreadyThere)
            }
            SessionMode::RouteSelected(_) => {
                self.go("select_route", SessionMode::RouteSelected(index))
            }
            from @ SessionMode::EditRoute(_) => {
                self.ignore("select_route", IgnoreReason::InvalidFrom(from))
            }
        }
    }

    pub fn enter_edit_mode(&mut self) -> Transition {
        match self.mode {
            SessionMode::RouteSelected(i) => self.go("enter_edit_mode", SessionMode::EditRoute(i)),
            SessionMode::EditRoute(_) => self.ignore("enter_edit_mode", IgnoreReason::AlreadyThere),
            from => self.ignore("enter_edit_mode", IgnoreReason::InvalidFrom(from)),
        }
    }

    pub fn exit_edit_mode(&mut self) -> Transition {
        match self.mode {
            SessionMode::EditRoute(i) => self.go("exit_edit_mode", SessionMode::RouteSelected(i)),
            from => self.ignore("exit_edit_mode", IgnoreReason::InvalidFrom(from)),
        }
    }

    pub fn clear_selection(&mut self) -> Transition {
        match self.mode {
            SessionMode::Viewing => self.ignore("clear_selection", IgnoreReason::AlreadyThere),
            _ => self.go("clear_selection", SessionMode::Viewing),
        }
    }

    /// Follow a change of the external edit toggle.
    ///
    /// Turning it on enters edit mode from `RouteSelected`; turning it off
    /// leaves edit mode. Repeating the last value does nothing.
    pub fn reconcile_edit_flag(&mut self, flag: bool) -> Transition {
        if flag == self.edit_flag {
            return self.ignore("reconcile_edit_flag", IgnoreReason::FlagUnchanged);
        }
        self.edit_flag = flag;
        match (flag, self.mode) {
            (true, SessionMode::RouteSelected(_)) => self.enter_edit_mode(),
            (false, SessionMode::EditRoute(_)) => self.exit_edit_mode(),
            (_, from) => self.ignore("reconcile_edit_flag", IgnoreReason::InvalidFrom(from)),
        }
    }

    fn go(&mut self, op: &'static str, to: SessionMode) -> Transition {
        let from = self.mode;
        self.mode = to;
        debug!(op, %from, %to, "Mode transition");
        Transition::Applied { from, to }
    }

    fn ignore(&self, op: &'static str, reason: IgnoreReason) -> Transition {
        debug!(op, mode = %self.mode, ?reason, "Transition ignored");
        Transition::Ignored(reason)
    }
}
