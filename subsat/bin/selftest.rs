use subsat::prelude::*;

fn main() {
    for report in run_self_test() {
        println!("{}", report);
    }
}
