//! Drag-and-drop reparenting of notes and tags.

mod bind;
mod controller;
mod mutation;
mod session;

pub(crate) use bind::DragReparentBinding;
pub(crate) use mutation::{MoveProtocol, Mutation};
