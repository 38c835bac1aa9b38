// src/profile/readme.rs
use crate::profile::models::ConnectionParameters;

const BANNER: &str = "=======================================================";

/// Formats the connection summary written to `<name>.readme.txt`.
pub fn render_readme(params: &ConnectionParameters) -> String {
    format!(
        "\n{BANNER}\n\
         Find below OpenVPN remote configuration\n\
         \n\
         Remote site domain name= {host}\n\
         Tunnel over port (local/remote)= {ports}\n\
         Protocol= {protocol}\n\
         Cipher= {cipher}\n\
         Bind to local address or port= {bind}\n\
         Interval for data channel renegotiation (in seconds)= {reneg}\n\
         Key Direction= {key_dir}\n\
         \n\
         {BANNER}\n",
        host = params.remote_host,
        ports = params.port_pair(),
        protocol = params.protocol,
        cipher = params.cipher,
        bind = params.bind_label(),
        reneg = params.reneg_sec,
        key_dir = params.key_direction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::PROTOCOL;

    fn sample_params() -> ConnectionParameters {
        ConnectionParameters {
            remote_host: "vpn.example.com".to_string(),
            remote_port: "443".to_string(),
            protocol: PROTOCOL,
            cipher: "AES-256-GCM".to_string(),
            bind: true,
            reneg_sec: "3600".to_string(),
            key_direction: 1,
        }
    }

    #[test]
    fn test_readme_contains_every_field() {
        let readme = render_readme(&sample_params());

        assert!(readme.contains("Remote site domain name= vpn.example.com\n"));
        assert!(readme.contains("Tunnel over port (local/remote)= 443/443\n"));
        assert!(readme.contains("Protocol= UDP\n"));
        assert!(readme.contains("Cipher= AES-256-GCM\n"));
        assert!(readme.contains("Bind to local address or port= Yes\n"));
        assert!(readme.contains("Interval for data channel renegotiation (in seconds)= 3600\n"));
        assert!(readme.contains("Key Direction= 1\n"));
        assert_eq!(readme.matches(BANNER).count(), 2);
    }

    #[test]
    fn test_readme_nobind() {
        let params = ConnectionParameters { bind: false, ..sample_params() };
        let readme = render_readme(&params);
        assert!(readme.contains("Bind to local address or port= No\n"));
    }
}
