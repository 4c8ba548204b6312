pub mod round_ops;
