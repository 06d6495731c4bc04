use score_line_parser::evaluate;

fn main() {
	let score_lines = [
		"F.C. Barcelona 3-2 Real Madrid",
		"Anna Karolina Schmiedlova (1) 1 40-Adv 1 (0) *Varvara Lepchenko",
		"Pittsburgh Steelers 3-7 Minnesota Vikings 3rd Quarter",
		"not a score line",
	];

	for line in score_lines {
		match evaluate(line) {
			Ok(parsed) => println!("{:?} -> {:?}", parsed.format(), parsed),
			Err(e) => eprintln!("{}: {}", line, e),
		}
	}
}
