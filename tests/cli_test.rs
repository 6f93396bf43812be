use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let catalog_path = dir.path().join("catalog.csv");
    let mut catalog = std::fs::File::create(&catalog_path)?;
    writeln!(catalog, "name,unit_price,supplier")?;
    writeln!(catalog, "Аспирин,100,ФармКо")?;
    drop(catalog);

    let script = "/start\n1234\nПолная оплата\nИван\n+7 701 111 11 11\nАлматы\n1\nАспирин\n2\n10\nMamibiomed\n";

    let mut cmd = assert_cmd::Command::new(cargo_bin!("salesbot"));
    cmd.arg(&catalog_path)
        .arg("--ledger-dir")
        .arg(dir.path())
        .arg("--access-code")
        .arg("1234")
        .write_stdin(script);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Введите код доступа:"))
        .stdout(predicate::str::contains("Здравствуйте, доступ открыт."))
        .stdout(predicate::str::contains(
            "[Полная оплата] [Предоплата] [Доплата предоплаты]",
        ))
        .stdout(predicate::str::contains("Продажа:"));

    let sales = std::fs::read_to_string(dir.path().join("sales.csv"))?;
    assert!(sales.contains("Иван"));
    // 2 * 100 * 0.9 = 180
    assert!(sales.contains("180"));

    Ok(())
}
