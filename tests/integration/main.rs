mod common;
mod test_live;
