use std::rc::Rc;

use chrono::{Duration, NaiveDate};
use yew::prelude::*;

use crate::booking::request::{parse_date, FormFields, CHECK_IN, CHECK_OUT, ROOM_TYPE};

/// State of the booking dialog and the form inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub visible: bool,
    pub fields: FormFields,
    pub min_check_in: Option<NaiveDate>,
    pub min_check_out: Option<NaiveDate>,
    pub submitting: bool,
    /// Bumped on every close so the form is rebuilt instead of reused.
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    Open {
        room_type: Option<String>,
        today: NaiveDate,
    },
    Close,
    /// Delayed close after a submission; ignored once the form it came
    /// from has already been closed.
    CloseSubmitted {
        generation: u32,
    },
    SetField {
        name: String,
        value: String,
    },
    SubmitStarted,
    SubmitFinished,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::Open { room_type, today } => {
                next.visible = true;
                if let Some(room) = room_type.filter(|r| !r.is_empty()) {
                    next.fields.set(ROOM_TYPE, room);
                }
                next.min_check_in = Some(today);
                next.min_check_out = Some(today);
            }
            ModalAction::Close => {
                if !next.visible {
                    return self;
                }
                next.close();
            }
            ModalAction::CloseSubmitted { generation } => {
                if !next.visible || next.generation != generation {
                    return self;
                }
                next.close();
            }
            ModalAction::SetField { name, value } => {
                let is_check_in = name == CHECK_IN;
                next.fields.set(name, value);
                if is_check_in {
                    next.check_in_changed();
                }
            }
            ModalAction::SubmitStarted => next.submitting = true,
            ModalAction::SubmitFinished => next.submitting = false,
        }
        Rc::new(next)
    }
}

impl ModalState {
    fn close(&mut self) {
        self.visible = false;
        self.fields = FormFields::default();
        self.min_check_in = None;
        self.min_check_out = None;
        self.generation = self.generation.wrapping_add(1);
    }

    // A stay is at least one night, so check-out moves with check-in.
    fn check_in_changed(&mut self) {
        let Ok(check_in) = parse_date(&self.fields.value(CHECK_IN)) else {
            return;
        };
        self.min_check_out = Some(check_in + Duration::days(1));

        let check_out = self.fields.value(CHECK_OUT);
        if check_out.is_empty() {
            return;
        }
        // Unreadable check-out values are left for validation to report
        if matches!(parse_date(&check_out), Ok(out) if out <= check_in) {
            self.fields.set(CHECK_OUT, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::request::{FULL_NAME, NUMBER_OF_PERSONS};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(state: Rc<ModalState>, name: &str, value: &str) -> Rc<ModalState> {
        state.reduce(ModalAction::SetField {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_starts_hidden() {
        assert!(!ModalState::default().visible);
    }

    #[test]
    fn test_open_preselects_room_and_min_dates() {
        let today = date(2025, 1, 5);
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open {
            room_type: Some("Presidential Suite".to_string()),
            today,
        });
        assert!(state.visible);
        assert_eq!(state.fields.get(ROOM_TYPE), Some("Presidential Suite"));
        assert_eq!(state.min_check_in, Some(today));
        assert_eq!(state.min_check_out, Some(today));
    }

    #[test]
    fn test_open_without_room_leaves_selection() {
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open {
            room_type: Some(String::new()),
            today: date(2025, 1, 5),
        });
        assert_eq!(state.fields.get(ROOM_TYPE), None);
    }

    #[test]
    fn test_close_clears_form() {
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open {
            room_type: Some("Deluxe Room".to_string()),
            today: date(2025, 1, 5),
        });
        let state = set(state, FULL_NAME, "Asha");
        let state = set(state, CHECK_IN, "2025-01-10");

        let state = state.reduce(ModalAction::Close);
        assert!(!state.visible);
        assert_eq!(state.fields, FormFields::default());
    }

    #[test]
    fn test_close_rebuilds_form() {
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open {
            room_type: None,
            today: date(2025, 1, 5),
        });
        let before = state.generation;
        let state = set(state, NUMBER_OF_PERSONS, "2");

        let state = state.reduce(ModalAction::Close);
        assert_ne!(state.generation, before);
        assert_eq!(state.fields.get(NUMBER_OF_PERSONS), None);
    }

    #[test]
    fn test_delayed_close_skips_reopened_form() {
        let open = ModalAction::Open {
            room_type: None,
            today: date(2025, 1, 5),
        };
        let state = Rc::new(ModalState::default()).reduce(open.clone());
        let submitted = state.generation;

        // Closed by hand and opened again before the delayed close fires
        let state = state.reduce(ModalAction::Close).reduce(open);
        let state = set(state, FULL_NAME, "Asha");
        let state = state.reduce(ModalAction::CloseSubmitted {
            generation: submitted,
        });
        assert!(state.visible);
        assert_eq!(state.fields.get(FULL_NAME), Some("Asha"));

        let current = state.generation;
        let state = state.reduce(ModalAction::CloseSubmitted {
            generation: current,
        });
        assert!(!state.visible);
        assert_eq!(state.fields, FormFields::default());
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let state = Rc::new(ModalState::default());
        let next = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_check_in_change_moves_check_out() {
        let state = Rc::new(ModalState::default());
        let state = set(state, CHECK_OUT, "2025-01-11");
        let state = set(state, CHECK_IN, "2025-01-11");
        assert_eq!(state.min_check_out, Some(date(2025, 1, 12)));
        assert_eq!(state.fields.get(CHECK_OUT), Some(""));

        let state = set(state, CHECK_OUT, "2025-01-15");
        let state = set(state, CHECK_IN, "2025-01-12");
        assert_eq!(state.fields.get(CHECK_OUT), Some("2025-01-15"));
    }

    #[test]
    fn test_submitting_flag() {
        let state = Rc::new(ModalState::default()).reduce(ModalAction::SubmitStarted);
        assert!(state.submitting);
        assert!(!state.reduce(ModalAction::SubmitFinished).submitting);
    }
}
