//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use tagged_result::{error, value, Result};

fn find(inventory: &[(&str, i32)], item: &str) -> Result<i32, String> {
    match inventory.iter().find(|(name, _)| *name == item) {
        Some(&(_, count)) => value(count).into(),
        None => error(format!("{item}: not found")).into(),
    }
}

fn main() {
    let inventory = [("apples", 42), ("pears", 0)];
    let queries: Vec<String> = std::env::args().skip(1).collect();
    let queries = if queries.is_empty() {
        vec!["apples".to_owned(), "plums".to_owned()]
    } else {
        queries
    };
    for query in &queries {
        let found = find(&inventory, query);
        if found.is_value() {
            println!("{query}: {}", unsafe { found.get_value() });
        } else {
            eprintln!("{}", unsafe { found.get_error() });
        }
    }
}
