//! Query command - print the SQL answer

use anstream::print;
use webhook_submit::query::final_query;

/// Run the query command
pub fn run_query() {
    print!("{}", final_query());
}
