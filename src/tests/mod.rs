mod collator_test;
mod indexer_test;
