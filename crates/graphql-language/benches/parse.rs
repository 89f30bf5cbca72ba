use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use graphql_language::Lexer;
use graphql_language::Parser;
use graphql_language::TokenKind;

const QUERY: &str = "query ExampleQuery($topProductsFirst: Int) {\n  me {\n    id\n  }\n  topProducts(first: $topProductsFirst) {\n    name\n    price\n    inStock\n    weight\n    reviews {\n      author {\n        id\n        name\n      }\n      body\n    }\n  }\n}";

fn bench_lexer(c: &mut Criterion) {
    c.bench_function("lex_query", move |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(QUERY);
            loop {
                let id = lexer.advance().unwrap();
                if lexer.stream()[id].kind == TokenKind::Eof {
                    break;
                }
                black_box(id);
            }
        })
    });
}

fn bench_parser(c: &mut Criterion) {
    c.bench_function("parse_query", move |b| {
        b.iter(|| {
            let document = Parser::new(QUERY).parse_document().unwrap();
            black_box(document)
        })
    });
}

criterion_group!(benches, bench_lexer, bench_parser);
criterion_main!(benches);
