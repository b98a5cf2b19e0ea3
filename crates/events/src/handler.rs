use stockroom_core::Aggregate;

/// Execute an aggregate command deterministically (no IO).
///
/// 1. **Decide**: `aggregate.handle(command)` produces events without mutating.
/// 2. **Evolve**: each event is applied in order.
///
/// If `handle` fails nothing is applied, so a rejected command leaves the
/// aggregate exactly as it was.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::AggregateRoot;

    #[derive(Debug, Default)]
    struct Counter {
        value: u32,
        version: u64,
    }

    impl AggregateRoot for Counter {
        fn version(&self) -> u64 {
            self.version
        }
    }

    impl Aggregate for Counter {
        type Command = u32;
        type Event = u32;
        type Error = &'static str;

        fn apply(&mut self, event: &u32) {
            self.value += event;
            self.version += 1;
        }

        fn handle(&self, command: &u32) -> Result<Vec<u32>, Self::Error> {
            if *command == 0 {
                return Err("zero");
            }
            Ok(vec![*command, 1])
        }
    }

    #[test]
    fn execute_applies_every_emitted_event() {
        let mut counter = Counter::default();
        let events = execute(&mut counter, &4).unwrap();
        assert_eq!(events, vec![4, 1]);
        assert_eq!(counter.value, 5);
        assert_eq!(counter.version(), 2);
    }

    #[test]
    fn rejected_command_applies_nothing() {
        let mut counter = Counter::default();
        assert_eq!(execute(&mut counter, &0), Err("zero"));
        assert_eq!(counter.version(), 0);
    }
}
