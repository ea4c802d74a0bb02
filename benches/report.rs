use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use employee_report::execution::{ExecutionEngine, ExecutionOptions};
use employee_report::ingestion::csv::ingest_csv_from_reader;
use employee_report::processing::{most_common_department, name_department, name_department_projection, sort_by_salary};
use employee_report::report::{EmployeeReport, ReportOptions};
use employee_report::types::{Employee, Roster, Salary};

fn synthetic_roster(n: usize) -> Roster {
    const DEPARTMENTS: [&str; 5] = ["Eng", "Sales", "Ops", "Finance", "Legal"];
    (0..n)
        .map(|i| {
            let salary: Salary = format!("{}.{:05}", 30_000 + (i * 7_919) % 70_000, i % 100_000)
                .parse()
                .unwrap();
            Employee::new(format!("emp{i}"), 20 + (i % 45) as u32, DEPARTMENTS[i % 5], salary)
        })
        .collect()
}

fn synthetic_csv(n: usize) -> String {
    let mut out = String::from("name,age,department,salary\n");
    for e in synthetic_roster(n).iter() {
        out.push_str(&format!("{},{},{},{}\n", e.name, e.age, e.department, e.salary));
    }
    out
}

fn bench_ingestion(c: &mut Criterion) {
    let csv = synthetic_csv(50_000);
    c.bench_function("ingest_csv_50k", |b| {
        b.iter(|| {
            black_box(ingest_csv_from_reader(csv.as_bytes()).unwrap())
        })
    });
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");
    for n in [1_000usize, 100_000] {
        let roster = synthetic_roster(n);
        group.bench_with_input(BenchmarkId::new("projection_sequential", n), &roster, |b, r| {
            b.iter(|| black_box(name_department_projection(r)))
        });
        group.bench_with_input(BenchmarkId::new("sort_by_salary", n), &roster, |b, r| {
            b.iter(|| black_box(sort_by_salary(r)))
        });
        group.bench_with_input(BenchmarkId::new("most_common_department", n), &roster, |b, r| {
            b.iter(|| black_box(most_common_department(r)))
        });
        group.bench_with_input(BenchmarkId::new("full_report", n), &roster, |b, r| {
            b.iter(|| black_box(EmployeeReport::build(r, &ReportOptions::default()).unwrap()))
        });
    }
    group.finish();
}

fn bench_parallel_projection(c: &mut Criterion) {
    let roster = synthetic_roster(100_000);
    let engine = ExecutionEngine::new(ExecutionOptions::default()).unwrap();
    c.bench_function("projection_parallel_100k", |b| {
        b.iter(|| black_box(engine.project_parallel(&roster, name_department)))
    });
}

criterion_group!(benches, bench_ingestion, bench_views, bench_parallel_projection);
criterion_main!(benches);
