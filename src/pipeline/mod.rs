// Pipeline orchestration — profile every document, then rank the pairs.

pub mod ranking;
