use crate::calendar::Command;

use super::action::Action;

/// Side effects returned by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Queue a follow-up action
    Action(Action),
    Batch(Vec<Effect>),
    /// Move the carousel view to `index`
    ScrollCarousel { index: usize, animated: bool },
}

impl Effect {
    /// Translate controller commands into effects, preserving their order
    pub fn from_commands(commands: Vec<Command>) -> Effect {
        let mut effects: Vec<Effect> = commands
            .into_iter()
            .map(|command| match command {
                Command::ScrollToIndex { index, animated } => Effect::ScrollCarousel { index, animated },
                Command::NotifyDateChange(date) => Effect::Action(Action::DateChanged(date)),
            })
            .collect();

        match effects.len() {
            0 => Effect::None,
            1 => effects.remove(0),
            _ => Effect::Batch(effects),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_from_commands_empty_is_none() {
        assert_eq!(Effect::from_commands(Vec::new()), Effect::None);
    }

    #[test]
    fn test_from_commands_keeps_scroll_before_notification() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let effect = Effect::from_commands(vec![
            Command::ScrollToIndex { index: 7, animated: false },
            Command::NotifyDateChange(date),
        ]);
        assert_eq!(
            effect,
            Effect::Batch(vec![
                Effect::ScrollCarousel { index: 7, animated: false },
                Effect::Action(Action::DateChanged(date)),
            ])
        );
    }

    #[test]
    fn test_from_commands_single_notification() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 18).unwrap();
        assert_eq!(
            Effect::from_commands(vec![Command::NotifyDateChange(date)]),
            Effect::Action(Action::DateChanged(date))
        );
    }
}
