pub mod flatten_impl;
