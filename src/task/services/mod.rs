//! Application services for board orchestration.

mod board;

pub use board::{
    CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService, UpdateTaskRequest,
};
