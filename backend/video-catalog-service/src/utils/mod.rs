// Utility functions for the catalog API

pub mod title_codec;
