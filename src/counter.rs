use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "increment" => Some(Self::Increment),
            "decrement" => Some(Self::Decrement),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            Self::Increment => "+1",
            Self::Decrement => "-1",
            Self::Reset => "Reset!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn of(count: i64) -> Self {
        if count > 0 {
            Self::Positive
        } else if count < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub count: i64,
    pub total_clicks: u64,
    pub max_value: i64,
    pub min_value: i64,
}

/// Counter value plus derived stats. Arithmetic saturates at the integer
/// bounds rather than wrapping or panicking.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    count: i64,
    total_clicks: u64,
    max_value: i64,
    min_value: i64,
}

impl WidgetState {
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        self.total_clicks = self.total_clicks.saturating_add(1);
        self.max_value = self.max_value.max(self.count);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
        self.total_clicks = self.total_clicks.saturating_add(1);
        self.min_value = self.min_value.min(self.count);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
            Action::Reset => self.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            count: self.count,
            total_clicks: self.total_clicks,
            max_value: self.max_value,
            min_value: self.min_value,
        }
    }

    pub fn tone(&self) -> Tone {
        Tone::of(self.count)
    }
}
