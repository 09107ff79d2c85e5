use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalloonEventKind {
    Touched,
    Expired,
}

impl BalloonEventKind {
    pub const ALL: [BalloonEventKind; 2] = [BalloonEventKind::Touched, BalloonEventKind::Expired];

    /// Stable wire name listeners subscribe with.
    pub fn name(self) -> &'static str {
        match self {
            Self::Touched => "event_balloon_touched",
            Self::Expired => "event_balloon_expired",
        }
    }
}

impl fmt::Display for BalloonEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown balloon event name '{0}'")]
pub struct UnknownEventName(pub String);

impl FromStr for BalloonEventKind {
    type Err = UnknownEventName;

    /// Exact, case-sensitive match on [`BalloonEventKind::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

/// Domain event raised by `BalloonModel::update`, carrying the balloon's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalloonEvent {
    Touched { text: String },
    Expired { text: String },
}

impl BalloonEvent {
    pub fn kind(&self) -> BalloonEventKind {
        match self {
            Self::Touched { .. } => BalloonEventKind::Touched,
            Self::Expired { .. } => BalloonEventKind::Expired,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Touched { text } | Self::Expired { text } => text,
        }
    }
}

pub type BalloonHandler = Box<dyn FnMut(&BalloonEvent) + Send + Sync>;

/// Typed listener registry owned by the model.
#[derive(Default)]
pub struct BalloonEmitter {
    handlers: Vec<(BalloonEventKind, BalloonHandler)>,
}

impl BalloonEmitter {
    pub fn on<F>(&mut self, kind: BalloonEventKind, handler: F)
    where
        F: FnMut(&BalloonEvent) + Send + Sync + 'static,
    {
        self.handlers.push((kind, Box::new(handler)));
    }

    /// Calls every handler registered for the event's kind, in registration order.
    /// Returns how many ran.
    pub fn emit(&mut self, event: &BalloonEvent) -> usize {
        let kind = event.kind();
        let mut called = 0;
        for (_, handler) in self.handlers.iter_mut().filter(|(k, _)| *k == kind) {
            handler(event);
            called += 1;
        }
        called
    }

    pub fn listener_count(&self, kind: BalloonEventKind) -> usize {
        self.handlers.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl fmt::Debug for BalloonEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BalloonEmitter")
            .field("touched", &self.listener_count(BalloonEventKind::Touched))
            .field("expired", &self.listener_count(BalloonEventKind::Expired))
            .finish()
    }
}
