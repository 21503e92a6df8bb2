// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_puzzle_source(blocks: usize) -> String {
    let mut source = String::from("def main(): :lock:\n");
    for block in 0..blocks {
        source.push_str(&format!("    for i{block} in range({block}):\n"));
        source.push_str(&format!("        total += i{block}\n"));
        source.push_str(&format!("        if total > {block}:\n"));
        source.push_str("            break\n");
    }
    source.push_str("    return total\n");
    source
}
