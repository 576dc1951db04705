use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    subscriber::DefaultGuard,
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

/// Recorded fields of a single event, keyed by field name.
pub type EventFields = BTreeMap<String, String>;

/// Collects the fields of error events.
#[derive(Clone, Default)]
pub struct ErrorEvents(Arc<Mutex<Vec<EventFields>>>);

impl ErrorEvents {
    /// Captures error events on the current thread until the guard is dropped.
    pub fn capture() -> (Self, DefaultGuard) {
        let events = Self::default();
        let guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));
        (events, guard)
    }

    pub fn events(&self) -> Vec<EventFields> {
        self.0.lock().unwrap().clone()
    }
}

struct FieldVisitor<'a>(&'a mut EventFields);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().into(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().into(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for ErrorEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            let mut fields = EventFields::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.0.lock().unwrap().push(fields);
        }
    }
}

/// Builds the expected fields of an error event.
pub fn event_fields<'a, I>(fields: I) -> EventFields
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
