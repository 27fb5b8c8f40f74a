//! Task sets: what a virtual user does.
//!
//! A task set declares a static table of tasks with weights and a schedule.
//! The runner builds one task set per virtual user, calls `on_start` once, then
//! repeatedly picks a task, runs it and waits.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use super::environment::Environment;
use crate::error::ClientError;

/// How the next task is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Random pick, proportional to the task weights.
    Weighted,
    /// Declared order, starting over after the last task. Weights are ignored.
    Sequential,
}

#[async_trait]
pub trait TaskSet: Sized + Send + 'static {
    type Task: Copy + fmt::Debug + Send + Sync + 'static;

    /// Tasks with their weights.
    fn tasks() -> &'static [(Self::Task, u32)];

    fn schedule() -> Schedule {
        Schedule::Weighted
    }

    /// Runs once per load run, before any virtual user starts.
    async fn init(_environment: &mut Environment) -> Result<(), ClientError> {
        Ok(())
    }

    /// Build the state of one virtual user.
    fn setup(environment: Arc<Environment>) -> Result<Self, ClientError>;

    /// Runs once per virtual user before its first task.
    async fn on_start(&mut self) -> Result<(), ClientError> {
        Ok(())
    }

    async fn run(&mut self, task: Self::Task) -> Result<(), ClientError>;
}

/// Picks tasks from a task table according to a schedule.
#[derive(Debug)]
pub struct TaskPicker<T: 'static> {
    tasks: &'static [(T, u32)],
    schedule: Schedule,
    weights: Option<WeightedIndex<u32>>,
    next: usize,
}

impl<T: Copy + 'static> TaskPicker<T> {
    pub fn new(tasks: &'static [(T, u32)], schedule: Schedule) -> Self {
        // Fails for an empty table or all-zero weights; such a picker yields nothing.
        let weights = WeightedIndex::new(tasks.iter().map(|(_, weight)| *weight)).ok();

        Self {
            tasks,
            schedule,
            weights,
            next: 0,
        }
    }

    pub fn next_task(&mut self) -> Option<T> {
        if self.tasks.is_empty() {
            return None;
        }

        match self.schedule {
            Schedule::Weighted => {
                let index = self.weights.as_ref()?.sample(&mut rand::rng());
                Some(self.tasks[index].0)
            }
            Schedule::Sequential => {
                let task = self.tasks[self.next].0;
                self.next = (self.next + 1) % self.tasks.len();
                Some(task)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        First,
        Second,
        Third,
    }

    const STEPS: &[(Step, u32)] = &[(Step::First, 1), (Step::Second, 0), (Step::Third, 3)];

    #[test]
    fn sequential_schedule_cycles_in_order() {
        let mut picker = TaskPicker::new(STEPS, Schedule::Sequential);

        let picked: Vec<_> = (0..6).filter_map(|_| picker.next_task()).collect();
        assert_eq!(
            picked,
            vec![Step::First, Step::Second, Step::Third, Step::First, Step::Second, Step::Third]
        );
    }

    #[test]
    fn weighted_schedule_skips_zero_weight_tasks() {
        let mut picker = TaskPicker::new(STEPS, Schedule::Weighted);

        for _ in 0..200 {
            assert_ne!(picker.next_task(), Some(Step::Second));
        }
    }

    #[test]
    fn all_zero_weights_yield_nothing() {
        const IDLE: &[(Step, u32)] = &[(Step::First, 0)];
        let mut picker = TaskPicker::new(IDLE, Schedule::Weighted);

        assert_eq!(picker.next_task(), None);
    }
}
