mod tests_parse;
