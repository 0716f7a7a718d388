mod pnm;

pub use pnm::PNMImageWriter;
