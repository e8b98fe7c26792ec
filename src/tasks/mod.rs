//! Background tasks module
//! 
//! This module contains the tasks the timer controller spawns on the runtime.

pub mod countdown;

pub(crate) use countdown::countdown_task;
