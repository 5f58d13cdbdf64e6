pub mod create_feature;
