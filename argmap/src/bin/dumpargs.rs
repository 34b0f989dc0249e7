// Runner binary: parse the invocation arguments and print what the table
// resolved them to. Handy for eyeballing dash normalization, last-wins
// overwrites, and -noXXX synthesis from a shell.

use argmap::ArgMap;

fn main() {
    let map = ArgMap::from_tokens(std::env::args().skip(1));

    let mut keys: Vec<&str> = map.keys().collect();
    keys.sort_unstable();

    for key in keys {
        println!("{}={}", key, map.get_str(key, ""));
        let all = map.get_all(key);
        if all.len() > 1 {
            for (i, value) in all.iter().enumerate() {
                println!("    [{}] {}", i, value);
            }
        }
    }

    if !map.positional().is_empty() {
        println!("--");
        for arg in map.positional() {
            println!("{}", arg);
        }
    }
}
