//! Run phase tests.
