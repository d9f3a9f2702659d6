mod basic;
mod iterators;
