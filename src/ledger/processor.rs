use crate::ledger::error::{BankError, FailureOutcome, ProcessorError};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Trait for commands that mutate system state
pub trait Command: Debug {
    type System: Clone;

    fn apply_to(&self, system: &mut Self::System) -> Result<(), BankError>;
}

/// Trait for queries that extract data from system state
pub trait Query: Debug {
    type System;
    type Result;

    fn extract_from(&self, system: &Self::System) -> Result<Self::Result, BankError>;
}

/// Holds the in-memory system and applies commands to it all-or-nothing.
#[derive(Debug)]
pub struct Processor<S, C>
where
    S: Clone,
    C: Command<System = S>,
{
    system: S,
    commands_applied: usize,
    _command: PhantomData<C>,
}

impl<S, C> Processor<S, C>
where
    S: Clone,
    C: Command<System = S>,
{
    pub fn new(system: S) -> Self {
        Self {
            system,
            commands_applied: 0,
            _command: PhantomData,
        }
    }

    /// Execute a query against the current system state
    pub fn execute_query<Q>(&self, query: &Q) -> Result<Q::Result, ProcessorError>
    where
        Q: Query<System = S>,
    {
        query.extract_from(&self.system).map_err(|e| {
            tracing::debug!(?query, error = %e, "query failed");
            ProcessorError::QueryFailure(FailureOutcome::new(
                e,
                "executing query",
                std::any::type_name::<Q>(),
            ))
        })
    }

    /// Execute a command with shadow-copy transaction semantics
    pub fn execute_command(&mut self, command: C) -> Result<(), ProcessorError> {
        let mut shadow = self.system.clone();

        if let Err(e) = command.apply_to(&mut shadow) {
            tracing::debug!(?command, error = %e, "command rejected");
            return Err(ProcessorError::CommandFailure(FailureOutcome::new(
                e,
                "executing command",
                std::any::type_name::<C>(),
            )));
        }

        self.system = shadow;
        self.commands_applied += 1;
        tracing::debug!(?command, total = self.commands_applied, "command applied");

        Ok(())
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Number of commands committed so far.
    pub fn commands_applied(&self) -> usize {
        self.commands_applied
    }
}
