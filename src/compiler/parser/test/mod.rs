#[cfg(test)]
mod unit_pest_parser;
