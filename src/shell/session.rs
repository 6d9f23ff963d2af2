use crate::application::library::{self, ServiceDependencies};
use crate::domain::{BookId, MemberId, commands::*};
use chrono::NaiveDate;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use super::menu::{MENU, MenuChoice};

/// 対話シェル
///
/// 1回の入力につき図書館サービスの操作を1つだけ呼び出す。
/// 業務エラーはメッセージを表示してループを続ける。
/// 入出力は任意の非同期リーダー・ライターで、テストではスクリプト入力を使う。
pub struct Shell<R, W> {
    deps: ServiceDependencies,
    input: Lines<R>,
    output: W,
    today: Box<dyn Fn() -> NaiveDate + Send + Sync>,
}

/// 1回の操作の結果
enum Step {
    Continue,
    Exit,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        deps: ServiceDependencies,
        input: R,
        output: W,
        today: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        Self {
            deps,
            input: input.lines(),
            output,
            today: Box::new(today),
        }
    }

    /// 終了が選ばれるか入力が尽きるまでメニューを繰り返す
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write(MENU).await?;

            let Some(line) = self.input.next_line().await? else {
                tracing::debug!("End of input, leaving shell");
                return Ok(());
            };

            let step = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice).await?,
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected menu input");
                    self.writeln("Invalid choice.").await?;
                    Step::Continue
                }
            };

            if let Step::Exit = step {
                return Ok(());
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Step> {
        match choice {
            MenuChoice::AddBook => {
                let Some(book_id) = self.prompt("Book ID: ").await? else {
                    return Ok(Step::Exit);
                };
                let Some(title) = self.prompt("Title: ").await? else {
                    return Ok(Step::Exit);
                };
                let Some(author) = self.prompt("Author: ").await? else {
                    return Ok(Step::Exit);
                };

                let cmd = AddBook {
                    book_id: BookId::new(book_id),
                    title,
                    author,
                };
                match library::add_book(&self.deps, cmd).await {
                    Ok(_) => self.writeln("Book Added!").await?,
                    Err(e) => self.writeln(&e.to_string()).await?,
                }
            }
            MenuChoice::AddMember => {
                let Some(member_id) = self.prompt("Member ID: ").await? else {
                    return Ok(Step::Exit);
                };
                let Some(name) = self.prompt("Name: ").await? else {
                    return Ok(Step::Exit);
                };

                let cmd = AddMember {
                    member_id: MemberId::new(member_id),
                    name,
                };
                match library::add_member(&self.deps, cmd).await {
                    Ok(_) => self.writeln("Member Added!").await?,
                    Err(e) => self.writeln(&e.to_string()).await?,
                }
            }
            MenuChoice::IssueBook => {
                let Some((book_id, member_id)) = self.prompt_book_and_member().await? else {
                    return Ok(Step::Exit);
                };

                let cmd = IssueBook {
                    book_id,
                    member_id,
                    issued_on: (self.today)(),
                };
                match library::issue_book(&self.deps, cmd).await {
                    Ok(()) => self.writeln("Book Issued!").await?,
                    Err(e) => self.writeln(&e.to_string()).await?,
                }
            }
            MenuChoice::ReturnBook => {
                let Some((book_id, member_id)) = self.prompt_book_and_member().await? else {
                    return Ok(Step::Exit);
                };

                let cmd = ReturnBook {
                    book_id,
                    member_id,
                    returned_on: (self.today)(),
                };
                match library::return_book(&self.deps, cmd).await {
                    Ok(receipt) => {
                        self.writeln(&format!("Book returned. Fine: {}", receipt.fine))
                            .await?
                    }
                    Err(e) => self.writeln(&e.to_string()).await?,
                }
            }
            MenuChoice::ShowInventory => match library::show_inventory(&self.deps).await {
                Ok(entries) => {
                    for entry in entries {
                        self.writeln(&entry.to_string()).await?;
                    }
                }
                Err(e) => self.writeln(&e.to_string()).await?,
            },
            MenuChoice::Exit => {
                self.writeln("Exiting...").await?;
                return Ok(Step::Exit);
            }
        }

        Ok(Step::Continue)
    }

    /// 貸出・返却で共通の入力（書籍ID、会員ID）
    async fn prompt_book_and_member(&mut self) -> io::Result<Option<(BookId, MemberId)>> {
        let Some(book_id) = self.prompt("Book ID: ").await? else {
            return Ok(None);
        };
        let Some(member_id) = self.prompt("Member ID: ").await? else {
            return Ok(None);
        };
        Ok(Some((BookId::new(book_id), MemberId::new(member_id))))
    }

    /// プロンプトを表示して1行読む。入力が尽きた場合は`None`
    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label).await?;
        self.input.next_line().await
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn writeln(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// 出力先を取り出す（テストで出力内容を検証するため）
    pub fn into_output(self) -> W {
        self.output
    }
}
