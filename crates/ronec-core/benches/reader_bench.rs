use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ronec_core::{LabelRepairer, parse_corpus};

fn synthetic_corpus(sentences: usize) -> String {
    let mut text = String::new();
    for i in 0..sentences {
        text.push_str(&format!("# sent_id = {i}\n# text = Ion Popescu a vizitat Iașiul .\n"));
        text.push_str("1\tIon\tIon\tPROPN\tNp\t_\t4\tnsubj\t_\t_\t1:B-PERSON\n");
        text.push_str("2\tPopescu\tPopescu\tPROPN\tNp\t_\t1\tflat\t_\t_\t1\n");
        text.push_str("3\ta\tavea\tAUX\tVa\t_\t4\taux\t_\t_\t*\n");
        text.push_str("4\tvizitat\tvizita\tVERB\tVm\t_\t0\troot\t_\t_\t*\n");
        text.push_str("5\tIașiul\tIași\tPROPN\tNp\t_\t4\tobj\t_\t_\t2:B-GPE\n");
        text.push_str("6\t.\t.\tPUNCT\tPeriod\t_\t4\tpunct\t_\t_\t*\n\n");
    }
    text
}

fn bench_reader(c: &mut Criterion) {
    let small = synthetic_corpus(1);
    let ronec_sized = synthetic_corpus(5127);

    c.bench_function("parse_corpus_single", |b| {
        b.iter(|| parse_corpus(black_box(small.as_bytes())).unwrap());
    });

    c.bench_function("parse_corpus_ronec_sized", |b| {
        b.iter(|| parse_corpus(black_box(ronec_sized.as_bytes())).unwrap());
    });
}

fn bench_repair(c: &mut Criterion) {
    let repairer = LabelRepairer::new().unwrap();
    let converted = r#"{"orth": "Ion", "ner": "B-RSON"}, {"orth": "2020", "ner": "U-TETIME"}"#
        .repeat(2000);

    c.bench_function("repair_labels", |b| {
        b.iter(|| repairer.repair(black_box(&converted)));
    });
}

criterion_group!(benches, bench_reader, bench_repair);
criterion_main!(benches);
