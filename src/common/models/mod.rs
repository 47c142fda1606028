pub mod hit;
pub mod sequence;

// Re-exports for cleaner imports
pub use self::hit::TelomereHit;
pub use self::sequence::SequenceStore;
