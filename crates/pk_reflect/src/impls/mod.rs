// -----------------------------------------------------------------------------
// Modules

mod enumerated;
mod scalar;
mod sequence;
mod wrapper;
