use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::replies;
use crate::core_network::epsv;
use crate::helpers::send_response;
use crate::session::Session;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// What the command loop should do after a command has been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

/// Routes one decoded command to its handler.
///
/// Every command gets a reply; there is no auth gate and no ordering
/// requirement between verbs. EPSV is the only asynchronous case: its
/// data-channel task sends its own replies later, the loop moves on at once.
pub async fn dispatch_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    session: &Arc<Mutex<Session>>,
    pasv_ip: IpAddr,
    command: FtpCommand,
) -> Result<LoopAction, std::io::Error> {
    match command {
        FtpCommand::USER => {
            crate::core_ftpcommand::user::handle_user_command(writer).await?;
        }
        FtpCommand::PASS => {
            crate::core_ftpcommand::pass::handle_pass_command(writer).await?;
        }
        FtpCommand::PWD => {
            crate::core_ftpcommand::pwd::handle_pwd_command(writer, session).await?;
        }
        FtpCommand::TYPEI => {
            crate::core_ftpcommand::type_::handle_type_command(writer).await?;
        }
        FtpCommand::EPSVALL => {
            epsv::handle_epsv_all_command(writer).await?;
        }
        FtpCommand::EPSV => {
            epsv::handle_epsv_command(writer, pasv_ip).await?;
        }
        FtpCommand::EPRT => {
            crate::core_ftpcommand::eprt::handle_eprt_command(writer).await?;
        }
        FtpCommand::PORT => {
            crate::core_ftpcommand::port::handle_port_command(writer).await?;
        }
        FtpCommand::CWD(arg) => {
            crate::core_ftpcommand::cwd::handle_cwd_command(writer, session, arg).await?;
        }
        FtpCommand::RETR(arg) => {
            crate::core_ftpcommand::retr::handle_retr_command(writer, session, arg).await?;
        }
        FtpCommand::QUIT => {
            crate::core_ftpcommand::quit::handle_quit_command(writer).await?;
            return Ok(LoopAction::Quit);
        }
        FtpCommand::UNKNOWN => {
            send_response(writer, replies::UNKNOWN_COMMAND).await?;
        }
    }
    Ok(LoopAction::Continue)
}
