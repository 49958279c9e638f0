//! Performance benchmarks for document generation.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payslip_engine::document::build_payslip;
use payslip_engine::models::{Company, Employee, PayItem, PayPeriod, PayrollRecord};
use payslip_engine::template::{SENIORITY_CERTIFICATE_TEMPLATE, render};

fn create_company() -> Company {
    Company {
        id: "emp-andina".to_string(),
        razon_social: "Comercial Andina SpA".to_string(),
        rut: "76.543.210-K".to_string(),
        direccion: "Av. Providencia 1234, of. 56".to_string(),
        ciudad: "Santiago".to_string(),
    }
}

fn create_employee() -> Employee {
    Employee {
        id: "tr-0001".to_string(),
        company_id: "emp-andina".to_string(),
        nombre: "Ana María Rojas Fuentes".to_string(),
        rut: "12.345.678-9".to_string(),
        cargo: "Analista Contable".to_string(),
        fecha_ingreso: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
    }
}

fn create_payroll(item_count: usize) -> PayrollRecord {
    let earnings = (0..item_count)
        .map(|n| PayItem {
            label: format!("Haber {}", n),
            amount: Decimal::from(10_000 + n as i64),
        })
        .collect();
    let deductions = vec![PayItem {
        label: "AFP (10%)".to_string(),
        amount: Decimal::from(95_000),
    }];

    PayrollRecord {
        employee_id: "tr-0001".to_string(),
        company_id: "emp-andina".to_string(),
        period: PayPeriod { year: 2026, month: 7 },
        earnings,
        deductions,
    }
}

fn certificate_fields() -> HashMap<String, String> {
    [
        ("razon_social_empresa", "Comercial Andina SpA"),
        ("rut_empresa", "76.543.210-K"),
        ("nombre_trabajador", "Ana María Rojas Fuentes"),
        ("rut_trabajador", "12.345.678-9"),
        ("fecha_ingreso", "01 de marzo de 2019"),
        ("cargo", "Analista Contable"),
        ("ciudad_firma", "Santiago"),
        ("dia_firma", "15"),
        ("mes_firma", "julio"),
        ("ano_firma", "2026"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn bench_render_certificate(c: &mut Criterion) {
    let fields = certificate_fields();

    c.bench_function("render_certificate", |b| {
        b.iter(|| {
            render(
                black_box(SENIORITY_CERTIFICATE_TEMPLATE),
                black_box(&fields),
            )
            .unwrap()
        })
    });
}

fn bench_build_payslip(c: &mut Criterion) {
    let company = create_company();
    let employee = create_employee();

    let mut group = c.benchmark_group("build_payslip");
    for item_count in [3usize, 12, 48] {
        let payroll = create_payroll(item_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &payroll,
            |b, payroll| {
                b.iter(|| {
                    build_payslip(black_box(&company), black_box(&employee), black_box(payroll))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_render_certificate, bench_build_payslip);
criterion_main!(benches);
