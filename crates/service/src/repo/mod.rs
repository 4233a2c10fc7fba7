//! Record store implementations behind the repository traits.

pub mod memory;
pub mod seaorm;

pub use memory::MemoryRepository;
pub use seaorm::SeaOrmRepository;
