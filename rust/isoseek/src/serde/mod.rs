pub mod peaks_io;
