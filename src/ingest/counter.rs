/// Game numbering for bot log files.
///
/// Each file of a bot log directory is one game played by one bot. Files are visited in name
/// order, so the files of one bot form a contiguous run; numbering restarts at 1 whenever the
/// bot changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotGameCounter {
    last_bot_type: Option<String>,
    counter: u32,
}

impl BotGameCounter {
    /// Moves on to the next file, played by `bot_type`.
    pub fn advance(self, bot_type: &str) -> Self {
        let counter = match self.last_bot_type.as_deref() {
            Some(last) if last == bot_type => self.counter + 1,
            _ => 1,
        };

        BotGameCounter {
            last_bot_type: Some(bot_type.to_string()),
            counter,
        }
    }

    pub fn game_number(&self) -> u32 {
        self.counter
    }
}

/// Game numbering for engine log rows: every row is one game, counted across all files of a
/// directory without ever resetting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineGameCounter {
    counter: u32,
}

impl EngineGameCounter {
    pub fn advance(self) -> Self {
        EngineGameCounter {
            counter: self.counter + 1,
        }
    }

    pub fn game_number(&self) -> u32 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_counter_resets_on_new_bot() {
        let bots = ["basicNegamax", "basicNegamax", "basicNegamax", "final1", "final1", "basicNegamax"];

        let (_, numbers) = bots.iter().fold((BotGameCounter::default(), vec![]), |(counter, mut numbers), bot| {
            let counter = counter.advance(bot);
            numbers.push(counter.game_number());
            (counter, numbers)
        });

        assert_eq!(numbers, vec![1, 2, 3, 1, 2, 1]);
    }

    #[test]
    fn engine_counter_never_resets() {
        let counter = (0..5).fold(EngineGameCounter::default(), |counter, _| counter.advance());
        assert_eq!(counter.game_number(), 5);
    }
}
