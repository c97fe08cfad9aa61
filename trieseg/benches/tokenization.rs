//! 前方最長一致法による分かち書きのベンチマーク
//!
//! 生成した辞書と文を用いて、ワーカーを再利用した場合の分割速度を計測します。

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use trieseg::{Dictionary, Tokenizer};

const CHARS: &str = "的一是在不了有和人这中大为上个国我以要他时来用们生到作地于出就分对成会可主发年动同工也能下过子说产种面而方后多定行学法所民得经十三之进着等部度家电力里如水化高自二理起小物现实加量都两体制机当使点从业本去把性好应开它合还因由其些然前外天政四日那社义事平形相全表间样与关各重新线内数正心反你明看原又么利比或但质气第向道命此变条只没结解问意建月公无系军很情者最立代想已通并提直题党程展五果料象员革位入常文总次品式活设及管特件长求老头基资边流路级少图山统接知较将组见计别她手角期根论运农指几九区强放决西被干做必战先回则任取据处队南给色光门即保治北造百规热领七海口东导器压志世金增争济阶油思术极交受联什认六共权收证改清己美再采转更单风切打白教速花带安场身车例真务具万每目至达走积示议声报斗完类八离华名确才科张信马节话米整空元况今集温传土许步群广石记需段研界拉林律叫且究观越织装影算低持音众书布复容儿须际商非验连断深难近矿千周委素技备半办青省列习响约支般史感劳便团往酸历市克何除消构府称太准精值号率族维划选标写存候毛亲快效斯院查江型眼王按格养易置派层片始却专状育厂京识适属圆包火住调满县局照参红细引听该铁价严";

fn generate(rng: &mut impl Rng, chars: &[char], len: usize) -> String {
    (0..len).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

fn bench_tokenization(c: &mut Criterion) {
    let chars: Vec<char> = CHARS.chars().collect();
    let mut rng = StdRng::seed_from_u64(42);

    let words: Vec<String> = (0..20000)
        .map(|_| {
            let len = rng.gen_range(1..=4);
            generate(&mut rng, &chars, len)
        })
        .collect();
    let mut dict_data = format!("{}\t4\n", words.len());
    for word in &words {
        dict_data.push_str(word);
        dict_data.push('\n');
    }
    let dict = Arc::new(Dictionary::from_reader(dict_data.as_bytes()).unwrap());

    let lines: Vec<String> = (0..1000)
        .map(|_| {
            let len = rng.gen_range(10..50);
            generate(&mut rng, &chars, len)
        })
        .collect();
    let total_bytes: usize = lines.iter().map(String::len).sum();

    let mut group = c.benchmark_group("Tokenization Speed");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    group.bench_function(BenchmarkId::new("Worker", "Generated"), |b| {
        b.iter_with_setup(
            || Tokenizer::from_shared_dictionary(dict.clone()).new_worker(),
            |mut worker| {
                for line in &lines {
                    worker.reset_sentence(line);
                    worker.tokenize().unwrap();
                }
            },
        );
    });

    group.bench_function(BenchmarkId::new("Owned", "Generated"), |b| {
        let tokenizer = Tokenizer::from_shared_dictionary(dict.clone());
        b.iter(|| {
            for line in &lines {
                tokenizer.tokenize(line.as_bytes()).unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization);
criterion_main!(benches);
