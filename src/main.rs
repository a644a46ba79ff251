fn main() {
    let mut rng = rand::thread_rng();

    let words = wordquest::catalog::random_set(5, &mut rng);
    let round = wordquest::round::Round::new(&words, wordquest::grid::DEFAULT_SIZE, &mut rng)
        .unwrap();

    println!("{}", round.grid());

    for word in round.words() {
        println!("{} {} = {}", word.article, word.german, word.english);
    }
}
